



/// ALU, shifter and control store.
pub mod units;
