#![no_main]
use libfuzzer_sys::fuzz_target;

use elfprobe::elf;
use elfprobe::Buffer;

fuzz_target!(|data: &[u8]| {
    let buffer = Buffer::from_bytes(data.to_vec());
    let _ = elf::is_elf(&buffer);
    let _ = elf::is_32(&buffer);
    let _ = elf::is_64(&buffer);
    let _ = elf::ehdr32(&buffer);
    if let Some(hdr) = elf::ehdr64(&buffer) {
        let _ = hdr.e_type();
        let _ = hdr.e_shoff();
    }
    if let Some(table) = elf::shdr_table64(&buffer) {
        for shdr in table.iter() {
            let _ = shdr.sh_type();
            let _ = shdr.sh_size();
        }
    }
});
