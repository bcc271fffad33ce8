pub mod algebra_2d;
pub mod assets;
pub mod audio;
pub mod frame_clock;
pub mod game_drawer;
pub mod game_loop;
pub mod mechanics;
pub mod painter_surface;
pub mod surface;
