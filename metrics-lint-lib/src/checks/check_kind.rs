use clap::ValueEnum;
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display, ValueEnum)]
pub enum CheckKind {
    /// Every metric has one effective rename and every rename has a metric
    #[strum(to_string = "transform coverage")]
    Coverage,

    /// No metric name is declared more than once
    #[strum(to_string = "duplicate names")]
    Duplicates,
}
