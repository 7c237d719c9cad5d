//! Command-line front end: classify and dump each named file.

use anyhow::{bail, Context, Result};

use elfprobe::elf::{self, ElfType, SectionType};
use elfprobe::{inspect, logging, Buffer};

fn tri(v: Option<bool>) -> &'static str {
    match v {
        Some(true) => "yes",
        Some(false) => "no",
        None => "unknown",
    }
}

fn show(path: &str, buffer: &Buffer) {
    println!("{} ({} bytes)", path, buffer.size());
    println!("  ELF:    {}", tri(elf::is_elf(buffer)));
    println!("  32 BIT: {}", tri(elf::is_32(buffer)));
    println!("  64 BIT: {}", tri(elf::is_64(buffer)));

    if elf::is_64(buffer) == Some(true) {
        if let Some(hdr) = elf::ehdr64(buffer) {
            let magic: Vec<String> = hdr.ident().iter().map(|b| format!("{:02x}", b)).collect();
            println!("  Magic: {}", magic.join(" "));
            println!("  Type: {}", ElfType::from(hdr.e_type()));
        } else {
            println!("  (truncated before the 64-bit header)");
        }

        match elf::shdr_table64(buffer) {
            Some(table) => {
                println!("SECTION HEADERS ({} entries)", table.len());
                for (index, shdr) in table.iter().enumerate() {
                    println!(
                        "  [{:2}] Name: {:6}  Type: {:10}  Size: {:#x}",
                        index,
                        shdr.sh_name(),
                        SectionType::from(shdr.sh_type()).to_string(),
                        shdr.sh_size()
                    );
                }
            }
            None => println!("SECTION HEADERS: unavailable"),
        }
    } else if elf::is_32(buffer) == Some(true) {
        if let Some(hdr) = elf::ehdr32(buffer) {
            println!("  Type: {}", ElfType::from(hdr.e_type()));
        }
    }

    match inspect::inspect(buffer) {
        Ok(report) => {
            println!(
                "OBJECT  format: {}  kind: {}  arch: {}  entry: {:#x}",
                report.format, report.kind, report.architecture, report.entry
            );
            for section in &report.sections {
                println!("  -- {}  size: {}", section.name, section.size);
            }
        }
        Err(err) => println!("OBJECT  unreadable: {}", err),
    }
}

fn main() -> Result<()> {
    logging::init_tracing();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        bail!("usage: elfprobe <file>...");
    }

    for path in &paths {
        let buffer = Buffer::load(path).with_context(|| format!("loading {}", path))?;
        show(path, &buffer);
    }

    Ok(())
}
