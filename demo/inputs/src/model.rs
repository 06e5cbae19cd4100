//! Price evolution models.

/// Random Walk (Geometric Brownian Motion) model with a fixed time step.
///
/// dS = μ*S*dt + σ*S*dW
///
/// The drift and diffusion terms are pre-computed once per step size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomWalkModel {
    drift_term: f64,
    diffusion_term: f64,
}

impl RandomWalkModel {
    /// Create a model for annual drift `mu`, annual volatility `sigma` and
    /// step `dt` in years.
    pub fn new(mu: f64, sigma: f64, dt: f64) -> Self {
        Self {
            drift_term: (mu - 0.5 * sigma * sigma) * dt,
            diffusion_term: sigma * dt.sqrt(),
        }
    }

    /// `(μ - σ²/2)·dt`
    pub fn drift_term(&self) -> f64 {
        self.drift_term
    }

    /// `σ·√dt`
    pub fn diffusion_term(&self) -> f64 {
        self.diffusion_term
    }

    /// Advance `current_price` by one step given a standard normal draw.
    pub fn evolve(&self, current_price: f64, random_draw: f64) -> f64 {
        // S(t+dt) = S(t) * exp((μ - σ²/2)*dt + σ*sqrt(dt)*Z)
        current_price * (self.drift_term + self.diffusion_term * random_draw).exp()
    }
}
