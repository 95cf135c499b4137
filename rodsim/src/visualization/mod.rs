pub mod playback;
pub mod rodsim_vis2d;
