pub mod dpsim_vis2d;
