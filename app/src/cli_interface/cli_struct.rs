use byte_unit::Byte;
use clap::Parser;

#[derive(Parser, Debug, PartialEq)]
#[command(author, version, about, long_about)]
pub enum KvfsCli {
    /// write a fresh superblock into an image file
    Format(FormatArgs),
    /// check that an image file holds a filesystem
    Verify(VerifyArgs),
}
/// format subcommand
#[derive(clap::Args, Debug, PartialEq)]
#[command(author, version, about = "format a file system")]
pub struct FormatArgs {
    /// the path of the image file, created if missing
    #[clap(short = 'p', long)]
    pub image_file_path: String,
    /// where the file system begins inside the image file
    #[clap(short, long, default_value = "0", value_parser = parse_byte_count)]
    pub offset: u64,
    /// the number of bytes to reserve for the file system
    #[clap(short, long, value_parser = parse_byte_count)]
    pub size: u64,
}

/// verify subcommand
#[derive(clap::Args, Debug, PartialEq)]
#[command(author, version, about = "verify a file system")]
pub struct VerifyArgs {
    /// the path of the image file
    #[clap(short = 'p', long)]
    pub image_file_path: String,
    /// where the file system begins inside the image file
    #[clap(short, long, default_value = "0", value_parser = parse_byte_count)]
    pub offset: u64,
}

/// parse a plain byte count or one with a unit, like `4KiB` or `16 MB`
fn parse_byte_count(s: &str) -> Result<u64, String> {
    let bytes = s.parse::<Byte>().map_err(|e| e.to_string())?.get_bytes();
    u64::try_from(bytes).map_err(|e| e.to_string())
}


/// test `verify` subcommand
#[cfg(test)]
mod verify_parse_args_tests {
    use super::*;
    /// test short parameter form
    #[test]
    fn test_short_parameter_form() {
        let args = KvfsCli::parse_from(["kvfs", "verify", "-p", "test", "-o", "16"]);
        assert_eq!(
            args,
            KvfsCli::Verify(VerifyArgs {
                image_file_path: "test".to_string(),
                offset: 16,
            })
        );
    }
    /// test long parameter form
    #[test]
    fn test_long_parameter_form() {
        let image_file_path_name = concat!("--", "image-file-path");
        let args = KvfsCli::parse_from(["kvfs", "verify", image_file_path_name, "test"]);
        assert_eq!(
            args,
            KvfsCli::Verify(VerifyArgs {
                image_file_path: "test".to_string(),
                offset: 0,
            })
        );
    }
}
