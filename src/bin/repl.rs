use dice_notation::roll::MarkdownStringifier;
use dice_notation::{message, Engine, Locale};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let locale = match std::env::var("DICE_LOCALE") {
        Ok(s) => s.parse::<Locale>()?,
        Err(_) => Locale::default(),
    };
    let markdown = std::env::args().skip(1).any(|arg| arg == "--markdown");
    let mut engine: Engine = Engine::default().with_locale(locale);

    let stdin = io::stdin();
    print!("> ");
    io::stdout().flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if !input.is_empty() {
            match engine.evaluate(input) {
                Ok(r) if markdown => println!("{}", r.display_with::<MarkdownStringifier>()),
                Ok(r) => println!("{}", r.display()),
                Err(why) => eprintln!("{}", message::describe(locale, input, &why)),
            }
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
