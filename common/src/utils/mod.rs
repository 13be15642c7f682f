pub mod numeric;
pub mod thermistor;
