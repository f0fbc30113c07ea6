use std::env;
use std::path::Path;
use std::process::ExitCode;

use cldr2qtimezone::{run, wrap, Error};

fn usage(name: &str, message: &str) {
    eprintln!("Usage: {} path/to/cldr/root path/to/qtbase", name);
    if !message.is_empty() {
        eprintln!("\n{}", message);
    }
}

fn main() -> ExitCode {
    let mut args = env::args();
    let name = args.next().unwrap_or_else(|| String::from("cldr2qtimezone"));
    let paths: Vec<String> = args.collect();
    let [cldr_root, qt_root] = match <[String; 2]>::try_from(paths) {
        Ok(paths) => paths,
        Err(_) => {
            usage(&name, "Expected two arguments");
            return ExitCode::FAILURE;
        }
    };

    match run(Path::new(&cldr_root), Path::new(&qt_root)) {
        Ok(dest) => {
            println!("Data generation completed, please check the new file at {}", dest.display());
            ExitCode::SUCCESS
        }
        Err(Error::Usage(message)) => {
            usage(&name, &message);
            ExitCode::FAILURE
        }
        Err(Error::Io(error)) => {
            eprintln!("Failed to open files to transcribe: {}", error);
            ExitCode::FAILURE
        }
        Err(error) => {
            eprintln!("{}", wrap(&format!("Error in Windows ID data: {}", error), 80));
            ExitCode::FAILURE
        }
    }
}
