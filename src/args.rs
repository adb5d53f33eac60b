use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a random 512-byte key
    GenerateKey(GenerateKeyArgs),

    /// Encrypt input to output
    Encrypt(CodecArgs),

    /// Decrypt input to output
    Decrypt(CodecArgs),
}

#[derive(Args, Debug)]
pub struct GenerateKeyArgs {
    /// Output file path (defaults to standard output)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Write the key in ASCII-armored form
    #[arg(short = 'a', long = "ascii")]
    pub ascii: bool,
}

#[derive(Args, Debug)]
pub struct CodecArgs {
    /// Key file path
    #[arg(short = 'k', long = "key")]
    pub key: PathBuf,

    /// Output file path (defaults to standard output)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Read/write in ASCII-armored form
    #[arg(short = 'a', long = "ascii")]
    pub ascii: bool,

    /// Input file path (defaults to standard input)
    pub input: Option<PathBuf>,
}
