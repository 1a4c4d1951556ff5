pub struct DefaultsConfig {
    pub particle_count: usize,
    pub box_size: f64,
    pub mass: f64,
    pub random_seed: Option<u64>,
    pub initial_velocity_std: f64,
    pub epsilon: f64,
    pub sigma: f64,
    pub max_force: f64,
    pub wall_thickness: f64,
    pub wall_stiffness: f64,
    pub dt: f64,
    pub steps_per_frame: usize,
    pub frames: u64,
    pub record_every: u64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            particle_count: 20,
            box_size: 10.0,
            mass: 1.0,
            random_seed: Some(42),
            initial_velocity_std: 0.1,
            epsilon: 1.0,
            sigma: 1.0,
            max_force: 50.0,
            wall_thickness: 0.5,
            wall_stiffness: 50.0,
            dt: 0.005,
            steps_per_frame: 5,
            frames: 2000,
            record_every: 1,
        }
    }
}
