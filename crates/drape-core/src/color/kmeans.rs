//! Seeded k-means over RGB samples.
//!
//! Identical colors are collapsed into one weighted sample before clustering,
//! which keeps large flat garments cheap without changing the Lloyd updates.
//! Unique colors are visited in sorted order and every random draw comes from
//! a single `StdRng` seeded from `seed`, so identical inputs always produce
//! identical centroids in identical order.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ColorConfig;

/// Result of a k-means fit.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansFit {
    /// Cluster centers in the algorithm's native order
    pub centroids: Vec<[f64; 3]>,
    /// Number of input pixels assigned to each centroid
    pub counts: Vec<u64>,
    /// Sum of squared distances from pixels to their centroid
    pub inertia: f64,
    /// Lloyd iterations run by the winning initialization
    pub iterations: usize,
}

impl KMeansFit {
    /// Centroids rounded to the nearest integer RGB value.
    pub fn rounded_centroids(&self) -> Vec<[u8; 3]> {
        self.centroids
            .iter()
            .map(|c| {
                [
                    c[0].round().clamp(0.0, 255.0) as u8,
                    c[1].round().clamp(0.0, 255.0) as u8,
                    c[2].round().clamp(0.0, 255.0) as u8,
                ]
            })
            .collect()
    }
}

/// Partition-based clustering with k-means++ initialization.
#[derive(Debug, Clone)]
pub struct KMeans {
    k: usize,
    seed: u64,
    max_iterations: usize,
    tolerance: f64,
    n_init: usize,
}

impl From<&ColorConfig> for KMeans {
    fn from(config: &ColorConfig) -> Self {
        Self {
            k: config.num_colors,
            seed: config.seed,
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
            n_init: config.n_init,
        }
    }
}

/// Collapsed input: unique colors with their multiplicity.
struct Samples {
    points: Vec<[f64; 3]>,
    weights: Vec<f64>,
    total_weight: f64,
}

impl Samples {
    fn collapse(pixels: &[[u8; 3]]) -> Self {
        let mut histogram: BTreeMap<[u8; 3], u64> = BTreeMap::new();
        for &p in pixels {
            *histogram.entry(p).or_insert(0) += 1;
        }
        let mut points = Vec::with_capacity(histogram.len());
        let mut weights = Vec::with_capacity(histogram.len());
        for (rgb, count) in histogram {
            points.push([rgb[0] as f64, rgb[1] as f64, rgb[2] as f64]);
            weights.push(count as f64);
        }
        let total_weight = weights.iter().sum();
        Self {
            points,
            weights,
            total_weight,
        }
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    /// Mean of the per-channel weighted variances.
    fn mean_variance(&self) -> f64 {
        let mut mean = [0.0; 3];
        for (p, &w) in self.points.iter().zip(&self.weights) {
            for c in 0..3 {
                mean[c] += p[c] * w;
            }
        }
        for m in &mut mean {
            *m /= self.total_weight;
        }
        let mut var = 0.0;
        for (p, &w) in self.points.iter().zip(&self.weights) {
            for c in 0..3 {
                let d = p[c] - mean[c];
                var += d * d * w;
            }
        }
        var / self.total_weight / 3.0
    }
}

fn squared_distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];
    dr * dr + dg * dg + db * db
}

/// Index of the closest centroid; ties resolve to the lowest index.
fn nearest(point: &[f64; 3], centroids: &[[f64; 3]]) -> (usize, f64) {
    let mut best = (0, f64::INFINITY);
    for (i, c) in centroids.iter().enumerate() {
        let d = squared_distance(point, c);
        if d < best.1 {
            best = (i, d);
        }
    }
    best
}

/// Draw an index with probability proportional to `weights`.
fn sample_proportional(rng: &mut StdRng, weights: &[f64], total: f64) -> usize {
    let target = rng.gen::<f64>() * total;
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > target {
            return i;
        }
    }
    // Floating point slack: fall back to the last positive weight.
    weights.iter().rposition(|&w| w > 0.0).unwrap_or(0)
}

/// Sample indices ordered by weighted distance to their center, largest first.
fn worst_served(samples: &Samples, distances: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..samples.len()).collect();
    order.sort_by(|&a, &b| {
        let da = distances[a] * samples.weights[a];
        let db = distances[b] * samples.weights[b];
        db.partial_cmp(&da).unwrap_or(std::cmp::Ordering::Equal)
    });
    order
}

impl KMeans {
    /// Create a clusterer for `k` groups with the given seed and default limits.
    pub fn new(k: usize, seed: u64) -> Self {
        Self {
            k,
            seed,
            max_iterations: 300,
            tolerance: 1e-4,
            n_init: 1,
        }
    }

    /// Override the Lloyd iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    /// Override the number of seeded restarts.
    pub fn with_n_init(mut self, n_init: usize) -> Self {
        self.n_init = n_init.max(1);
        self
    }

    /// Number of clusters produced.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Cluster `pixels` into exactly `k` centroids.
    ///
    /// Returns `None` when there are no pixels or `k == 0`. With fewer distinct
    /// colors than `k`, duplicate centroids are returned so the result always
    /// has `k` entries.
    pub fn fit(&self, pixels: &[[u8; 3]]) -> Option<KMeansFit> {
        if pixels.is_empty() || self.k == 0 {
            return None;
        }

        let samples = Samples::collapse(pixels);
        let tol = self.tolerance * samples.mean_variance();
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut best: Option<KMeansFit> = None;
        for run in 0..self.n_init {
            let init = self.init_plus_plus(&samples, &mut rng);
            let fit = self.lloyd(&samples, init, tol);
            tracing::trace!(
                "k-means run {} converged in {} iterations (inertia {:.2})",
                run,
                fit.iterations,
                fit.inertia
            );
            match &best {
                Some(b) if b.inertia <= fit.inertia => {}
                _ => best = Some(fit),
            }
        }
        best
    }

    /// k-means++ seeding: each new center is drawn proportionally to the
    /// weighted squared distance to the closest center chosen so far.
    fn init_plus_plus(&self, samples: &Samples, rng: &mut StdRng) -> Vec<[f64; 3]> {
        let mut centroids = Vec::with_capacity(self.k);
        let first = sample_proportional(rng, &samples.weights, samples.total_weight);
        centroids.push(samples.points[first]);

        let mut closest: Vec<f64> = samples
            .points
            .iter()
            .map(|p| squared_distance(p, &samples.points[first]))
            .collect();

        while centroids.len() < self.k {
            let scores: Vec<f64> = closest
                .iter()
                .zip(&samples.weights)
                .map(|(d, w)| d * w)
                .collect();
            let total: f64 = scores.iter().sum();
            let idx = if total > 0.0 {
                sample_proportional(rng, &scores, total)
            } else {
                // Every sample already coincides with a center.
                sample_proportional(rng, &samples.weights, samples.total_weight)
            };
            let center = samples.points[idx];
            for (d, p) in closest.iter_mut().zip(&samples.points) {
                *d = d.min(squared_distance(p, &center));
            }
            centroids.push(center);
        }
        centroids
    }

    fn lloyd(&self, samples: &Samples, mut centroids: Vec<[f64; 3]>, tol: f64) -> KMeansFit {
        let n = samples.len();
        let mut labels = vec![0usize; n];
        let mut iterations = 0;

        for _ in 0..self.max_iterations {
            iterations += 1;
            let mut distances = vec![0.0; n];
            for (i, p) in samples.points.iter().enumerate() {
                let (label, d) = nearest(p, &centroids);
                labels[i] = label;
                distances[i] = d;
            }

            let mut sums = vec![[0.0f64; 3]; self.k];
            let mut mass = vec![0.0f64; self.k];
            for ((p, &w), &label) in samples.points.iter().zip(&samples.weights).zip(&labels) {
                for c in 0..3 {
                    sums[label][c] += p[c] * w;
                }
                mass[label] += w;
            }

            // Empty clusters move to the samples worst served by their center.
            let mut far: Option<Vec<usize>> = None;
            let mut relocated = 0;

            let mut shift = 0.0;
            let mut updated = Vec::with_capacity(self.k);
            for (j, old) in centroids.iter().enumerate() {
                let new = if mass[j] > 0.0 {
                    [
                        sums[j][0] / mass[j],
                        sums[j][1] / mass[j],
                        sums[j][2] / mass[j],
                    ]
                } else {
                    let order = far.get_or_insert_with(|| worst_served(samples, &distances));
                    let idx = order[relocated % n];
                    relocated += 1;
                    samples.points[idx]
                };
                shift += squared_distance(old, &new);
                updated.push(new);
            }
            centroids = updated;

            if shift <= tol {
                break;
            }
        }

        let mut counts = vec![0u64; self.k];
        let mut inertia = 0.0;
        for (p, &w) in samples.points.iter().zip(&samples.weights) {
            let (label, d) = nearest(p, &centroids);
            counts[label] += w as u64;
            inertia += d * w;
        }

        KMeansFit {
            centroids,
            counts,
            inertia,
            iterations,
        }
    }
}
