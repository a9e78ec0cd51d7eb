use rapier2d::prelude::*;

/// Handle to identify rigid bodies
pub type RigidBodyHandle = rapier2d::prelude::RigidBodyHandle;

/// Handle to identify colliders
pub type ColliderHandle = rapier2d::prelude::ColliderHandle;

/// Fixed simulation step (60 ticks per second)
pub const PHYSICS_TIMESTEP: Real = 1.0 / 60.0;

/// Physics world that manages all physics simulation
///
/// The world works in logical screen pixels with y pointing down and no
/// gravity: the only forces acting on the ball come from the magnets.
pub struct PhysicsWorld {
    /// Gravity vector (zero for MagLab)
    gravity: Vector<Real>,

    /// Integration parameters for the physics simulation
    integration_parameters: IntegrationParameters,

    /// Physics pipeline handles collision detection and solving
    physics_pipeline: PhysicsPipeline,

    /// Island manager for sleeping bodies
    island_manager: IslandManager,

    /// Broad phase collision detection
    broad_phase: DefaultBroadPhase,

    /// Narrow phase collision detection
    narrow_phase: NarrowPhase,

    /// Impulse joint set
    impulse_joint_set: ImpulseJointSet,

    /// Multibody joint set
    multibody_joint_set: MultibodyJointSet,

    /// CCD solver for fast-moving objects
    ccd_solver: CCDSolver,

    /// Rigid body set
    rigid_body_set: RigidBodySet,

    /// Collider set
    collider_set: ColliderSet,
}

impl PhysicsWorld {
    /// Create a new physics world without gravity
    pub fn new() -> Self {
        Self::with_gravity(Vector::zeros())
    }

    /// Create a new physics world with custom gravity
    pub fn with_gravity(gravity: Vector<Real>) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = PHYSICS_TIMESTEP;

        Self {
            gravity,
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
        }
    }

    /// Step the physics simulation forward by one timestep
    ///
    /// `hooks` get a say on every contact involving a collider that opted in
    /// through its active hooks.
    pub fn step(&mut self, hooks: &dyn PhysicsHooks) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            None,
            hooks,
            &(),
        );
    }

    /// Add a rigid body to the physics world
    pub fn add_rigid_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.rigid_body_set.insert(body)
    }

    /// Add a collider attached to a rigid body
    pub fn add_collider(
        &mut self,
        collider: Collider,
        parent_handle: RigidBodyHandle,
    ) -> ColliderHandle {
        self.collider_set
            .insert_with_parent(collider, parent_handle, &mut self.rigid_body_set)
    }

    /// Add a collider that is not attached to any body (static geometry)
    pub fn add_static_collider(&mut self, collider: Collider) -> ColliderHandle {
        self.collider_set.insert(collider)
    }

    /// Get a reference to a rigid body
    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(handle)
    }

    /// Get a mutable reference to a rigid body
    pub fn get_rigid_body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.rigid_body_set.get_mut(handle)
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_has_no_gravity() {
        let mut world = PhysicsWorld::new();
        let handle = world.add_rigid_body(RigidBodyBuilder::dynamic().build());
        world.add_collider(ColliderBuilder::ball(1.0).build(), handle);

        for _ in 0..10 {
            world.step(&());
        }

        let body = world.get_rigid_body(handle).unwrap();
        assert_eq!(*body.translation(), Vector::zeros());
    }

    #[test]
    fn test_timestep_is_fixed() {
        let world = PhysicsWorld::new();
        assert!((world.integration_parameters.dt - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_static_collider_blocks_body() {
        let mut world = PhysicsWorld::new();
        world.add_static_collider(
            ColliderBuilder::cuboid(10.0, 1.0)
                .translation(vector![0.0, 20.0])
                .build(),
        );
        let handle = world.add_rigid_body(
            RigidBodyBuilder::dynamic()
                .linvel(vector![0.0, 60.0])
                .build(),
        );
        world.add_collider(ColliderBuilder::ball(1.0).build(), handle);

        for _ in 0..60 {
            world.step(&());
        }

        let body = world.get_rigid_body(handle).unwrap();
        assert!(body.translation().y < 20.0);
    }
}
