// Pure aggregation pipeline: raw upstream records in, view models out.
// No I/O happens below this module.

pub mod aggregate;
pub mod parse;

pub use aggregate::{
    build_kecamatan_comparison, merge_sppg_realization, transform_potential,
    transform_realization, RealizationRollup, SppgTally,
};
