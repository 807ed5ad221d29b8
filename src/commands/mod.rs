pub mod eval;
pub mod format;
pub mod parse;

use ms::Options;

use crate::cli::StyleArgs;

impl StyleArgs {
    /// Layer the command-line style flags over `base`. `--long` only ever turns verbose
    /// output on; `--decimal` replaces any configured precision.
    pub fn apply(&self, base: Options) -> Options {
        let mut options = base;
        if self.long {
            options = options.with_long(true);
        }
        if let Some(decimal) = self.decimal {
            options = options.with_decimal(decimal);
        }
        options
    }
}
