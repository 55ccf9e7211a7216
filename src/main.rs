mod cmd;
mod console;

use cmd::Commands;
use library_catalog::config;
use library_catalog::Library;
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    let commands = cmd::CommandLine::parse_args();

    config::load_dotenv();
    let app_config = config::load_config()?;
    let _guard = config::log::set_global_logging_config(app_config.logger())?;

    let mut library = Library::from_config(app_config.library());
    match commands.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let mut console = console::Console::new(io::stdin().lock(), io::stdout().lock());
            console.run(&mut library)?;
        }
        Commands::Generate { count, json } => {
            library.generate(count)?;
            console::write_snapshot(&library, json, &mut io::stdout().lock())?;
        }
    }
    Ok(())
}
