use changelog_gen::{
   config, generate, style,
   types::{Cli, Command},
};
use clap::Parser;

fn main() {
   // Pick up CHANGELOG_API_KEY / CHANGELOG_API_URL from a .env if present
   dotenvy::dotenv().ok();

   let cli = Cli::parse();

   let result = match cli.command {
      Some(Command::Init) => config::run_init(),
      Some(Command::Generate(args)) => generate::run_generate(&args),
      Some(Command::Show) => config::run_show(),
      None => {
         print_banner();
         Ok(())
      },
   };

   if let Err(e) = result {
      eprintln!("{} {e}", style::error(style::icons::ERROR));
      if let Some(hint) = e.hint() {
         eprintln!();
         eprintln!("{}", style::info(hint));
      }
      std::process::exit(1);
   }
}

/// Short usage banner for a bare invocation (exits 0)
fn print_banner() {
   println!("Welcome to Changelog Generator!");
   println!();
   println!("Available commands:");
   println!("  init      - Initialize configuration");
   println!("  generate  - Generate a changelog");
   println!("  show      - Show current configuration");
   println!();
   println!("Run 'changelog --help' for more information");
}
