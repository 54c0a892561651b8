use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "adbook")]
#[command(
    about = "Console address book with notes and birthday countdowns",
    long_about = None
)]
pub struct Cli {
    /// Contacts shown per page
    #[arg(short = 'n', long, default_value_t = 3)]
    pub page_size: usize,
}
