use crate::{body::RigidBody, engine::PhysicsEngine, vector::Vector2D};

/// Per-body state handed to a renderer.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CBodyState {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// 0 for bodies without a circle.
    pub radius: f64,
}

#[unsafe(no_mangle)]
pub extern "C" fn PhysicsEngine_Create(gx: f64, gy: f64) -> *mut PhysicsEngine {
    Box::into_raw(Box::new(PhysicsEngine::new(Vector2D::new(gx, gy))))
}

/// # Safety
/// `handle` must be null or come from `PhysicsEngine_Create` and not be destroyed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn PhysicsEngine_Destroy(handle: *mut PhysicsEngine) {
    if !handle.is_null() {
        unsafe { drop(Box::from_raw(handle)) };
    }
}

/// # Safety
/// `handle` must be null or a live engine pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn PhysicsEngine_Step(handle: *mut PhysicsEngine, dt: f64) {
    if let Some(engine) = unsafe { handle.as_mut() } {
        engine.step(dt);
    }
}

/// Returns the index of the new body, or -1 if the handle is null or the
/// mass or radius is invalid.
///
/// # Safety
/// `handle` must be null or a live engine pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn PhysicsEngine_AddCircle(
    handle: *mut PhysicsEngine,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    mass: f64,
    radius: f64,
) -> i64 {
    let Some(engine) = (unsafe { handle.as_mut() }) else {
        return -1;
    };

    match RigidBody::circle(Vector2D::new(x, y), Vector2D::new(vx, vy), mass, radius) {
        Ok(body) => engine.add_body(body).index() as i64,
        Err(err) => {
            log::warn!("rejected body from C caller: {err}");
            -1
        }
    }
}

/// # Safety
/// `handle` must be null or a live engine pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn PhysicsEngine_GetBodyCount(handle: *const PhysicsEngine) -> usize {
    unsafe { handle.as_ref() }.map_or(0, |engine| engine.len())
}

/// Writes the state of body `index` into `out`. Returns false if either
/// pointer is null or the index is out of range.
///
/// # Safety
/// `handle` must be null or a live engine pointer, `out` null or valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn PhysicsEngine_GetBodyState(
    handle: *const PhysicsEngine,
    index: usize,
    out: *mut CBodyState,
) -> bool {
    let (Some(engine), Some(out)) = (unsafe { handle.as_ref() }, unsafe { out.as_mut() }) else {
        return false;
    };
    let Some(body) = engine.bodies().get(index) else {
        return false;
    };

    *out = CBodyState {
        x: body.position.x,
        y: body.position.y,
        vx: body.velocity.x,
        vy: body.velocity.y,
        radius: body.radius().unwrap_or(0.0),
    };
    true
}
