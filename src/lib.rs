pub mod breakout;
pub mod util;
