//! A node without outgoing edges.
//!
//! Node 0 links nowhere, node 1 links to node 0. The walk restarts uniformly from node 0.
use approx::assert_abs_diff_eq;

use crate::algorithm::rank::{rank_dense, RankConfig};
use crate::data::linear_algebra::EPSILON;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::DenseVector;
use crate::io::text::parse_dense;

const GRAPH_LITERAL_STRING: &str = "Matrix: 2 by 2
row 0: 0 0
row 1: 1 0
";

fn stochastic() -> DenseMatrix<f64> {
    DenseMatrix::from_data(vec![vec![0.5, 0.5], vec![1_f64, 0_f64]]).unwrap()
}

fn transition() -> DenseMatrix<f64> {
    DenseMatrix::from_data(vec![vec![0.5, 0.5], vec![0.75, 0.25]]).unwrap()
}

fn ranks() -> Vec<DenseVector<f64>> {
    vec![
        DenseVector::new(vec![0.625, 0.375]),
        DenseVector::new(vec![0.59375, 0.40625]),
    ]
}

#[test]
fn conversion_pipeline() {
    let matrix = parse_dense::<f64>(GRAPH_LITERAL_STRING).unwrap();

    let config = RankConfig { iterations: 2, ..RankConfig::default() };
    let run = rank_dense(matrix, &config).unwrap();
    assert_eq!(run.nr_dangling, 1);
    assert_eq!(run.stochastic, stochastic());
    assert_eq!(run.transition, transition());
    assert_eq!(run.initial, DenseVector::new(vec![0.5, 0.5]));
    assert_eq!(run.ranks, ranks());

    assert_eq!(run.stochastic.to_string(), "Matrix: 2 by 2\nrow 0: 0.5 0.5 \nrow 1: 1 0 \n");
    assert_eq!(run.transition.to_string(), "Matrix: 2 by 2\nrow 0: 0.5 0.5 \nrow 1: 0.75 0.25 \n");
    assert_eq!(run.ranks[1].to_string(), "Vector: 2\n0.59375 0.40625 \n");
}

#[test]
fn converges() {
    let config = RankConfig { iterations: 60, ..RankConfig::default() };
    let run = rank_dense(parse_dense::<f64>(GRAPH_LITERAL_STRING).unwrap(), &config).unwrap();

    let rank = run.rank();
    assert_abs_diff_eq!(rank[0], 0.6, epsilon = EPSILON);
    assert_abs_diff_eq!(rank[1], 0.4, epsilon = EPSILON);
}
