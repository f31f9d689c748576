/*!
# Snapshot wire format

A snapshot is seven little-endian `f32`s with no header, tag or checksum:

```text
px py pz | qx qy qz qw
```

Reader and writer must agree on this order; nothing on the wire would reveal
a mismatch. A replication frame prefixes the snapshot with the `u32` network id
of the character it belongs to.
*/

use bevy::prelude::*;

use crate::ecs::core::error::SnapshotError;
use crate::ecs::plugins::network::components::{PoseSnapshot, ReplicationFrame};

pub const SNAPSHOT_LEN: usize = 7 * 4;
pub const FRAME_LEN: usize = 4 + SNAPSHOT_LEN;

pub fn encode_snapshot(snapshot: &PoseSnapshot) -> [u8; SNAPSHOT_LEN] {
    let mut out = [0u8; SNAPSHOT_LEN];
    let p = snapshot.position;
    let q = snapshot.rotation;
    for (chunk, value) in out.chunks_exact_mut(4).zip([p.x, p.y, p.z, q.x, q.y, q.z, q.w]) {
        chunk.copy_from_slice(&value.to_le_bytes());
    }
    out
}

pub fn decode_snapshot(bytes: &[u8]) -> Result<PoseSnapshot, SnapshotError> {
    if bytes.len() != SNAPSHOT_LEN {
        return Err(SnapshotError::Length { expected: SNAPSHOT_LEN, actual: bytes.len() });
    }

    let mut values = [0f32; 7];
    for (value, chunk) in values.iter_mut().zip(bytes.chunks_exact(4)) {
        *value = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let [px, py, pz, qx, qy, qz, qw] = values;
    Ok(PoseSnapshot {
        position: Vec3::new(px, py, pz),
        rotation: Quat::from_xyzw(qx, qy, qz, qw),
    })
}

pub fn encode_frame(frame: &ReplicationFrame) -> Vec<u8> {
    let mut out = Vec::with_capacity(FRAME_LEN);
    out.extend_from_slice(&frame.network_id.to_le_bytes());
    out.extend_from_slice(&encode_snapshot(&frame.snapshot));
    out
}

pub fn decode_frame(bytes: &[u8]) -> Result<ReplicationFrame, SnapshotError> {
    if bytes.len() != FRAME_LEN {
        return Err(SnapshotError::Length { expected: FRAME_LEN, actual: bytes.len() });
    }

    let network_id = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let snapshot = decode_snapshot(&bytes[4..])?;
    Ok(ReplicationFrame { network_id, snapshot })
}

/// Network id of a frame without decoding the pose. Used by the relay, which
/// only routes.
pub fn frame_network_id(bytes: &[u8]) -> Option<u32> {
    let id: [u8; 4] = bytes.get(..4)?.try_into().ok()?;
    Some(u32::from_le_bytes(id))
}
