// Dynamic Programming problems module

pub mod coin_combinations_2;
