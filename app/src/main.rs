use byte_unit::Byte;
use clap::Parser;
use kvfs::cli_interface::KvfsCli;
/// a CLI interface to users to format our filesystem inside an image file,
/// or check that an image file already holds one.
///
/// the filesystem may start anywhere inside the image, given by `--offset`.
fn main() -> anyhow::Result<()> {
    env_logger::builder().format_timestamp_nanos().init();
    let args = KvfsCli::parse();
    match args {
        KvfsCli::Format(args) => {
            kvfs::mkfs::mkfs(args.image_file_path, args.offset, args.size)?;
        }
        KvfsCli::Verify(args) => {
            let superblock = kvfs::verify::verify(&args.image_file_path, args.offset)?;
            println!(
                "{}: kvfs version {} at offset {}, {} reserved",
                args.image_file_path,
                superblock.version,
                args.offset,
                Byte::from_bytes(superblock.size as _).get_appropriate_unit(true)
            );
        }
    }
    Ok(())
}
