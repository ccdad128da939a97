mod property_differential;
mod utils;
