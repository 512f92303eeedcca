//! Behavioral clustering of activities with deterministic k-means

use crate::analysis::result::BehavioralClusters;
use crate::analysis::result::ClusterSummary;
use crate::analysis::result::Facet;
use crate::analysis::statistics::ratio;
use crate::models::RawItem;
use crate::models::RawUserData;

const MAX_ITERATIONS: usize = 100;
const FEATURES: usize = 4;

type Point = [f64; FEATURES];

/// [score, body length, comment count, self post flag]
fn features(item: &RawItem) -> Point {
    [
        item.score as f64,
        item.body_len() as f64,
        item.num_comments.unwrap_or(0) as f64,
        if item.is_self { 1.0 } else { 0.0 },
    ]
}

fn squared_distance(a: &Point, b: &Point) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Index of the closest centroid, lowest index on ties
fn nearest(point: &Point, centroids: &[Point]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, centroid) in centroids.iter().enumerate() {
        let distance = squared_distance(point, centroid);
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }
    best
}

/// Farthest-point initialisation starting from the first point
fn initial_centroids(points: &[Point], k: usize) -> Vec<Point> {
    let mut centroids = vec![points[0]];
    while centroids.len() < k {
        let mut farthest = 0;
        let mut farthest_distance = -1.0;
        for (i, point) in points.iter().enumerate() {
            let distance = centroids
                .iter()
                .map(|c| squared_distance(point, c))
                .fold(f64::INFINITY, f64::min);
            if distance > farthest_distance {
                farthest = i;
                farthest_distance = distance;
            }
        }
        centroids.push(points[farthest]);
    }
    centroids
}

/// Lloyd iterations until assignments settle; returns one label per point
pub fn kmeans(points: &[Point], k: usize) -> Vec<usize> {
    if points.is_empty() || k == 0 {
        return Vec::new();
    }

    let mut centroids = initial_centroids(points, k.min(points.len()));
    let mut labels: Vec<usize> = points.iter().map(|p| nearest(p, &centroids)).collect();

    for _ in 0..MAX_ITERATIONS {
        for (cluster, centroid) in centroids.iter_mut().enumerate() {
            let members: Vec<&Point> = points
                .iter()
                .zip(&labels)
                .filter(|(_, label)| **label == cluster)
                .map(|(p, _)| p)
                .collect();
            // an empty cluster keeps its previous centroid
            if members.is_empty() {
                continue;
            }
            for (dim, value) in centroid.iter_mut().enumerate() {
                *value = members.iter().map(|p| p[dim]).sum::<f64>() / members.len() as f64;
            }
        }

        let next: Vec<usize> = points.iter().map(|p| nearest(p, &centroids)).collect();
        if next == labels {
            break;
        }
        labels = next;
    }

    labels
}

pub fn cluster_activities(data: &RawUserData, max_clusters: usize) -> Facet<BehavioralClusters> {
    let items: Vec<&RawItem> = data.activities().map(|(_, item)| item).collect();
    if items.len() < 2 {
        return Facet::Empty;
    }

    let n_clusters = max_clusters.min(items.len() / 2);
    if n_clusters == 0 {
        return Facet::Empty;
    }

    let points: Vec<Point> = items.iter().map(|item| features(item)).collect();
    let cluster_labels = kmeans(&points, n_clusters);

    let clusters = (0..n_clusters)
        .map(|cluster_id| {
            let members: Vec<&RawItem> = items
                .iter()
                .zip(&cluster_labels)
                .filter(|(_, label)| **label == cluster_id)
                .map(|(item, _)| *item)
                .collect();
            let size = members.len() as f64;
            ClusterSummary {
                cluster_id,
                size: members.len(),
                avg_score: ratio(members.iter().map(|m| m.score as f64).sum(), size),
                avg_length: ratio(members.iter().map(|m| m.body_len() as f64).sum(), size),
            }
        })
        .collect();

    Facet::Ready(BehavioralClusters {
        n_clusters,
        clusters,
        cluster_labels,
    })
}
