pub mod case_set;
pub mod truth_table;

pub use case_set::CaseSet;
pub use truth_table::TruthTable;
