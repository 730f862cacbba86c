//! Consumers of the combined shake offset.
//!
//! The controller pushes one position and one rotation offset per frame. A
//! sink decides what to do with them: move a camera, log them, record them.

use glam::{EulerRot, Mat4, Quat, Vec3};
use std::cell::RefCell;
use std::rc::Rc;

/// Receives the aggregated offset once per frame.
pub trait OffsetSink {
    fn set_position_offset(&mut self, offset: Vec3);
    /// Euler angles in degrees.
    fn set_rotation_offset(&mut self, offset: Vec3);
}

/// Lets a host keep a handle on a sink it gave to the controller.
impl<S: OffsetSink> OffsetSink for Rc<RefCell<S>> {
    fn set_position_offset(&mut self, offset: Vec3) {
        self.borrow_mut().set_position_offset(offset);
    }

    fn set_rotation_offset(&mut self, offset: Vec3) {
        self.borrow_mut().set_rotation_offset(offset);
    }
}

/// Right-handed perspective camera with a local shake transform.
///
/// The shake offset is applied like a child transform of the camera: the
/// position offset is in camera-local space and the rotation is local Euler
/// degrees, applied yaw (Y), pitch (X), then roll (Z).
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    local_position: Vec3,
    local_euler_degrees: Vec3,
}

impl CameraRig {
    pub fn new(eye: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            aspect,
            fovy_radians: std::f32::consts::FRAC_PI_4,
            znear: 0.1,
            zfar: 100.0,
            local_position: Vec3::ZERO,
            local_euler_degrees: Vec3::ZERO,
        }
    }

    pub fn local_position(&self) -> Vec3 {
        self.local_position
    }

    pub fn local_euler_degrees(&self) -> Vec3 {
        self.local_euler_degrees
    }

    /// Local shake rotation as a quaternion.
    pub fn local_rotation(&self) -> Quat {
        let r = self.local_euler_degrees;
        Quat::from_euler(
            EulerRot::YXZ,
            r.y.to_radians(),
            r.x.to_radians(),
            r.z.to_radians(),
        )
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// View matrix without shake.
    pub fn base_view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// View matrix with the local shake transform applied.
    pub fn view_matrix(&self) -> Mat4 {
        let local = Mat4::from_rotation_translation(self.local_rotation(), self.local_position);
        // camera world = base_world * local, so view = local^-1 * base_view
        local.inverse() * self.base_view_matrix()
    }
}

impl OffsetSink for CameraRig {
    fn set_position_offset(&mut self, offset: Vec3) {
        self.local_position = offset;
    }

    fn set_rotation_offset(&mut self, offset: Vec3) {
        self.local_euler_degrees = offset;
    }
}
