pub mod satsim_vis2d;
