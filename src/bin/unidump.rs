use std::env;
use std::io::{self, BufWriter, Write};
use std::process::exit;

use log::LevelFilter;
use simple_logger::SimpleLogger;

use unidump::{run, DumpError, UnicodeDatabase, USAGE_MESSAGE};

fn bail(message: &str) -> ! {
    eprintln!("unidump: {}", message);
    exit(1);
}

fn main() {
    // Silent unless RUST_LOG asks for more.
    if let Err(e) = SimpleLogger::new().with_level(LevelFilter::Off).env().init() {
        bail(&format!("failed to install logger: {}", e));
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = run(env::args_os(), &UnicodeDatabase, &mut out);
    let flushed = out.flush();
    drop(out);

    match result {
        Ok(_) => {}
        Err(DumpError::ArgumentCount(_)) => {
            println!("{}", USAGE_MESSAGE);
            exit(1);
        }
        Err(e) => bail(&e.to_string()),
    }

    if let Err(e) = flushed {
        bail(&DumpError::Output(e).to_string());
    }
}
