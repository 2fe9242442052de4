/// External flag inputs (EF1-EF4), sampled by the host before any
/// flag-conditional branch executes.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExternalFlags {
    pub ef1: bool,
    pub ef2: bool,
    pub ef3: bool,
    pub ef4: bool,
}

/// Host interface the CPU core is driven through. Memory, I/O ports, the Q
/// output line, and the four external flags are all implemented by the
/// host; the core never touches hardware directly.
pub trait Bus {
    fn mem_read(&mut self, addr: u16) -> u8;
    fn mem_write(&mut self, addr: u16, value: u8);

    /// INP reads port 1..7 (the low 3 bits of the opcode's N nibble).
    fn port_read(&mut self, n: u8) -> u8;

    /// OUT writes port 1..7.
    fn port_write(&mut self, n: u8, value: u8);

    /// Sample EF1..EF4 into the returned snapshot. May be called more than
    /// once per step; the core calls it exactly once per flag-branch opcode.
    fn sample_flags(&mut self) -> ExternalFlags;

    /// Mirrors the Q flip-flop to an external pin. Called on reset, REQ, SEQ.
    fn set_q(&mut self, bit: bool);

    /// Invoked on IDL (0x00). Should block until the host's resume condition
    /// (DMA or interrupt request) is met. The default CPU behavior never
    /// advances R(P) itself while idling.
    fn idle_wait(&mut self);
}
