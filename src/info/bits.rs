//! Word-size queries

use crate::info::host_info;
use crate::types::BitsSubject;

/// Get the native machine word size in bits, one of 32 or 64
pub fn bits() -> u32 {
    host_info().bits
}

/// Get the word size in bits for a recognized subject
pub fn bits_of(subject: BitsSubject) -> u32 {
    match subject {
        BitsSubject::Machine => host_info().bits,
        BitsSubject::Binary => usize::BITS,
    }
}

/// Get the word size in bits for a string selector, or `None` if the
/// selector names no recognized subject
pub fn bits_for(selector: &str) -> Option<u32> {
    selector.parse::<BitsSubject>().ok().map(bits_of)
}

/// Word size of a machine architecture string, falling back to the
/// pointer width of the running binary for architectures outside the table
pub(crate) fn machine_bits(machine: &str) -> u32 {
    match machine {
        "x86_64" | "aarch64" | "powerpc64" | "riscv64" | "s390x" | "loongarch64" | "sparc64"
        | "mips64" => 64,
        "x86" | "arm" | "powerpc" | "riscv32" | "mips" | "m68k" => 32,
        _ => usize::BITS,
    }
}
