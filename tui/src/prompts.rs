use std::fmt::Display;
use std::io::{self, Write};
use std::str::FromStr;

/// Prints `prompt` and returns the next input line, trimmed.
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Keeps asking until the input parses.
pub fn read_parsed<T: FromStr>(prompt: &str) -> io::Result<T> {
    loop {
        let line = read_line(prompt)?;
        match line.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid input, please try again."),
        }
    }
}

/// Keeps asking until the input parses and lies within `[min, max]`.
pub fn read_in_range<T>(prompt: &str, min: T, max: T) -> io::Result<T>
where
    T: FromStr + PartialOrd + Copy + Display,
{
    loop {
        let value: T = read_parsed(prompt)?;
        if value >= min && value <= max {
            return Ok(value);
        }
        println!("Please enter a value between {} and {}.", min, max);
    }
}

pub fn read_bool(prompt: &str) -> io::Result<bool> {
    loop {
        let line = read_line(prompt)?.to_lowercase();
        match line.as_str() {
            "y" | "yes" | "1" => return Ok(true),
            "n" | "no" | "0" => return Ok(false),
            _ => println!("Please answer y or n."),
        }
    }
}
