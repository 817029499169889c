use bitflags::bitflags;

/// Total addressable memory (64 KiB).
///
/// There is no banking here: cartridge MBCs, VRAM/OAM locking and IO side
/// effects belong to whatever sits behind the `Bus` in a full machine.
pub const MEMORY_SIZE: usize = 0x10000;

/// Interrupt enable register (IE).
pub const IE_ADDR: u16 = 0xFFFF;
/// Interrupt flag register (IF).
pub const IF_ADDR: u16 = 0xFF0F;

/// Interrupt sources in priority order (lowest bit first).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Interrupt {
    VBlank = 0,
    Lcd = 1,
    Timer = 2,
    Serial = 3,
    Joypad = 4,
}

impl Interrupt {
    pub const ALL: [Interrupt; 5] = [
        Interrupt::VBlank,
        Interrupt::Lcd,
        Interrupt::Timer,
        Interrupt::Serial,
        Interrupt::Joypad,
    ];

    #[inline]
    pub fn bit(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn mask(self) -> InterruptMask {
        InterruptMask::from_bits_truncate(1 << self.bit())
    }
}

bitflags! {
    /// Bit layout shared by IE and IF.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct InterruptMask: u8 {
        const VBLANK = 1 << 0;
        const LCD    = 1 << 1;
        const TIMER  = 1 << 2;
        const SERIAL = 1 << 3;
        const JOYPAD = 1 << 4;
    }
}

/// Abstraction over the Game Boy bus (memory and IO).
///
/// Only `read8`/`write8` are required. The interrupt helpers are layered on
/// top of them at the two fixed register addresses, so any bus that stores
/// IE/IF like ordinary memory gets them for free.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    fn interrupt_enable(&mut self) -> InterruptMask {
        InterruptMask::from_bits_truncate(self.read8(IE_ADDR))
    }

    fn interrupt_flags(&mut self) -> InterruptMask {
        InterruptMask::from_bits_truncate(self.read8(IF_ADDR))
    }

    fn is_interrupt_enabled(&mut self, source: Interrupt) -> bool {
        self.interrupt_enable().contains(source.mask())
    }

    /// Sets or clears one source's bit in IE. Bits above the five sources
    /// are left as they were.
    fn set_interrupt_enabled(&mut self, source: Interrupt, enabled: bool) {
        let raw = self.read8(IE_ADDR);
        let bit = 1 << source.bit();
        let value = if enabled { raw | bit } else { raw & !bit };
        self.write8(IE_ADDR, value);
    }

    fn is_interrupt_requested(&mut self, source: Interrupt) -> bool {
        self.interrupt_flags().contains(source.mask())
    }

    fn set_interrupt_requested(&mut self, source: Interrupt, requested: bool) {
        let raw = self.read8(IF_ADDR);
        let bit = 1 << source.bit();
        let value = if requested { raw | bit } else { raw & !bit };
        self.write8(IF_ADDR, value);
    }

    /// Sources that are both enabled and requested, lowest bit first.
    fn pending_interrupts(&mut self) -> Vec<Interrupt> {
        let pending = self.interrupt_enable() & self.interrupt_flags();
        Interrupt::ALL
            .into_iter()
            .filter(|source| pending.contains(source.mask()))
            .collect()
    }
}

/// Flat, zero-initialised 64 KiB memory.
#[derive(Clone)]
pub struct Memory {
    bytes: Box<[u8; MEMORY_SIZE]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    pub fn new() -> Self {
        Self {
            bytes: Box::new([0; MEMORY_SIZE]),
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..]
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.bytes.iter().filter(|&&b| b != 0).count();
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .field("non_zero_bytes", &used)
            .finish()
    }
}

impl Bus for Memory {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }
}
