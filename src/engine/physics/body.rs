use super::collision::CollisionGroups;
use rapier2d::prelude::*;

/// Builder for creating rigid bodies with common configurations
pub struct BodyBuilder {
    body_type: RigidBodyType,
    position: Isometry<Real>,
    /// Friction is simulated by the game after each step, not by the solver
    linear_damping: Real,
    can_sleep: bool,
}

impl BodyBuilder {
    /// Create a new dynamic body (affected by forces and collisions)
    pub fn new_dynamic() -> Self {
        Self {
            body_type: RigidBodyType::Dynamic,
            position: Isometry::identity(),
            linear_damping: 0.0,
            can_sleep: true,
        }
    }

    /// Set the initial position of the body
    pub fn position(mut self, x: Real, y: Real) -> Self {
        self.position = Isometry::translation(x, y);
        self
    }

    /// Set whether the body can sleep when inactive
    pub fn can_sleep(mut self, can_sleep: bool) -> Self {
        self.can_sleep = can_sleep;
        self
    }

    /// Build the rigid body
    pub fn build(self) -> RigidBody {
        RigidBodyBuilder::new(self.body_type)
            .position(self.position)
            .linear_damping(self.linear_damping)
            .can_sleep(self.can_sleep)
            .build()
    }
}

/// Builder for creating colliders with common configurations
///
/// Restitution combines multiplicatively so two 0.7 surfaces bounce at 0.49.
pub struct ColliderBuilder2D {
    shape: SharedShape,
    offset: Vector<Real>,
    collision_groups: CollisionGroups,
    friction: Real,
    restitution: Real,
    mass: Option<Real>,
    active_hooks: ActiveHooks,
}

impl ColliderBuilder2D {
    /// Create a box-shaped collider
    pub fn box_shape(half_width: Real, half_height: Real) -> Self {
        Self::new(SharedShape::cuboid(half_width, half_height))
    }

    /// Create a box collider from its left/top/right/bottom edges
    pub fn from_bounds(left: Real, top: Real, right: Real, bottom: Real) -> Self {
        let mut builder = Self::box_shape((right - left) / 2.0, (bottom - top) / 2.0);
        builder.offset = vector![(left + right) / 2.0, (top + bottom) / 2.0];
        builder
    }

    /// Create a circle-shaped collider
    pub fn circle(radius: Real) -> Self {
        Self::new(SharedShape::ball(radius))
    }

    fn new(shape: SharedShape) -> Self {
        Self {
            shape,
            offset: Vector::zeros(),
            collision_groups: CollisionGroups::Wall,
            friction: 0.5,
            restitution: 0.0,
            mass: None,
            active_hooks: ActiveHooks::empty(),
        }
    }

    /// Set the collision groups for filtering
    pub fn collision_groups(mut self, groups: CollisionGroups) -> Self {
        self.collision_groups = groups;
        self
    }

    /// Set friction coefficient (0.0 = no friction, 1.0 = high friction)
    pub fn friction(mut self, friction: Real) -> Self {
        self.friction = friction;
        self
    }

    /// Set restitution/bounciness (0.0 = no bounce, 1.0 = perfect bounce)
    pub fn restitution(mut self, restitution: Real) -> Self {
        self.restitution = restitution;
        self
    }

    /// Set mass directly
    pub fn mass(mut self, mass: Real) -> Self {
        self.mass = Some(mass);
        self
    }

    /// Let physics hooks modify this collider's contacts
    pub fn contact_hooks(mut self) -> Self {
        self.active_hooks |= ActiveHooks::MODIFY_SOLVER_CONTACTS;
        self
    }

    /// Build the collider
    pub fn build(self) -> Collider {
        let mut builder = ColliderBuilder::new(self.shape)
            .translation(self.offset)
            .collision_groups(self.collision_groups.to_interaction_groups())
            .friction(self.friction)
            .restitution(self.restitution)
            .restitution_combine_rule(CoefficientCombineRule::Multiply)
            .friction_combine_rule(CoefficientCombineRule::Multiply)
            .active_hooks(self.active_hooks);

        if let Some(mass) = self.mass {
            builder = builder.mass(mass);
        }

        builder.build()
    }
}

/// Body and collider configurations for MagLab objects
pub mod presets {
    use super::*;

    /// Surface bounciness shared by walls, ball and bell
    pub const ELASTICITY: Real = 0.7;

    /// Ball and bell surface friction
    pub const BODY_FRICTION: Real = 0.7;

    /// Ball and bell mass
    pub const BODY_MASS: Real = 1.0;

    /// Create a free-moving round body (ball or bell)
    pub fn round_body(x: Real, y: Real) -> RigidBody {
        BodyBuilder::new_dynamic()
            .position(x, y)
            .can_sleep(false)
            .build()
    }

    /// Create the ball collider
    pub fn ball_collider(radius: Real) -> Collider {
        ColliderBuilder2D::circle(radius)
            .collision_groups(CollisionGroups::Ball)
            .friction(BODY_FRICTION)
            .restitution(ELASTICITY)
            .mass(BODY_MASS)
            .contact_hooks()
            .build()
    }

    /// Create the bell collider
    pub fn bell_collider(radius: Real) -> Collider {
        ColliderBuilder2D::circle(radius)
            .collision_groups(CollisionGroups::Bell)
            .friction(BODY_FRICTION)
            .restitution(ELASTICITY)
            .mass(BODY_MASS)
            .contact_hooks()
            .build()
    }

    /// Create a frictionless wall from its edges
    pub fn wall_collider(left: Real, top: Real, right: Real, bottom: Real) -> Collider {
        ColliderBuilder2D::from_bounds(left, top, right, bottom)
            .collision_groups(CollisionGroups::Wall)
            .friction(0.0)
            .restitution(ELASTICITY)
            .build()
    }
}
