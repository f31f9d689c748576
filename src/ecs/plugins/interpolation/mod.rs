/*!
# Remote Interpolation

Mirrored characters never jump to a received pose. Each tick they cover
`damping * dt` of the remaining distance to their pending target, which keeps
motion continuous under irregular snapshot arrival at the cost of roughly
`1 / damping` seconds of added visual latency.
*/

pub mod plugin;
pub mod systems;

pub use plugin::InterpolationPlugin;
