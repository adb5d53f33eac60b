mod args;

use args::{Cli, Commands};
use clap::Parser;

use std::io::{Read, Write};
use std::path::Path;
use std::time::Instant;
use std::{fs, io};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Nalenc(#[from] nalenc::Error),
}

fn main() {
    if let Err(e) = nalenc_cli() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn nalenc_cli() -> Result<(), CliError> {
    let args = Cli::parse();

    match args.command {
        Commands::GenerateKey(gen) => {
            let key = nalenc::Key::random()?;
            write_output(key.as_bytes(), gen.output.as_deref(), gen.ascii, Data::Key)?;
            Ok(())
        }
        Commands::Encrypt(enc) => {
            let plaintext = read_input(enc.input.as_deref())?;
            let key = read_key(&enc.key)?;
            let cipher = nalenc::Cipher::new(&key);

            let start = Instant::now();
            let ciphertext = cipher.encrypt(&plaintext);
            let duration = start.elapsed();

            write_output(&ciphertext, enc.output.as_deref(), enc.ascii, Data::Message)?;
            eprintln!(
                "Encrypted {} bytes in {} ms",
                plaintext.len(),
                duration.as_millis()
            );
            Ok(())
        }
        Commands::Decrypt(dec) => {
            let input = read_input(dec.input.as_deref())?;
            let key = read_key(&dec.key)?;
            let cipher = nalenc::Cipher::new(&key);

            let ciphertext = if dec.ascii {
                nalenc::armor::decode_message(std::str::from_utf8(&input).map_err(|_| {
                    nalenc::Error::Armor("ciphertext input is not valid UTF-8".into())
                })?)?
            } else {
                input
            };

            let start = Instant::now();
            let plaintext = cipher.decrypt(&ciphertext)?;
            let duration = start.elapsed();

            write_output(&plaintext, dec.output.as_deref(), dec.ascii, Data::Message)?;
            eprintln!(
                "Decrypted {} bytes in {} ms",
                plaintext.len(),
                duration.as_millis()
            );
            Ok(())
        }
    }
}

enum Data {
    Key,
    Message,
}

fn read_key(path: &Path) -> Result<nalenc::Key, CliError> {
    let raw = fs::read(path)?;
    Ok(nalenc::armor::read_key_bytes(&raw)?)
}

fn read_input(path: Option<&Path>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_output(data: &[u8], path: Option<&Path>, ascii: bool, kind: Data) -> io::Result<()> {
    let armored;
    let bytes: &[u8] = if ascii {
        armored = match kind {
            Data::Key => nalenc::armor::encode_key(&nalenc::Key::try_from_slice(data).expect(
                "write_output is only called with a valid 512-byte key when kind is Data::Key",
            )),
            Data::Message => nalenc::armor::encode_message(data),
        };
        armored.as_bytes()
    } else {
        data
    };

    match path {
        Some(path) => fs::write(path, bytes),
        None => io::stdout().write_all(bytes),
    }
}
