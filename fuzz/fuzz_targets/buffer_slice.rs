#![no_main]
use libfuzzer_sys::fuzz_target;

use elfprobe::Buffer;

fuzz_target!(|input: (Vec<u8>, u64, usize)| {
    let (data, offset, len) = input;
    let size = data.len();
    let buffer = Buffer::from_bytes(data);

    match buffer.slice(offset, len) {
        Some(view) => {
            assert!(buffer.is_usable());
            assert_eq!(view.len(), len);
            assert!(offset as usize + len <= size);
        }
        None => {
            let fits = buffer.is_usable()
                && offset <= size as u64
                && offset.checked_add(len as u64).is_some_and(|end| end <= size as u64);
            assert!(!fits);
        }
    }
    let _ = buffer.byte_at(offset);
});
