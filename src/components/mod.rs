mod spinner;

pub use spinner::LazyLoadSpinner;
