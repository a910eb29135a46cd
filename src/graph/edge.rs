use num_traits::{Float, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::graph::Vertex;
use crate::{Error, Result};

/// A directed, weighted edge between two named vertices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<W = f64> {
    from: Vertex,
    to: Vertex,
    weight: W,
}

impl<W> Edge<W>
where
    W: Float + Debug,
{
    /// Creates a new edge `from -> to` with the given weight
    pub fn new(from: impl Into<Vertex>, to: impl Into<Vertex>, weight: W) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// The vertex the edge leaves
    pub fn from(&self) -> &Vertex {
        &self.from
    }

    /// The vertex the edge enters
    pub fn to(&self) -> &Vertex {
        &self.to
    }

    /// The edge weight
    pub fn weight(&self) -> W {
        self.weight
    }

    /// Rejects weights the relaxation cannot order: NaN and anything below zero
    pub fn validate(&self) -> Result<()> {
        if self.weight.is_nan() {
            return Err(Error::InvalidWeight {
                from: self.from.name().to_string(),
                to: self.to.name().to_string(),
            });
        }
        if self.weight < W::zero() {
            return Err(Error::NegativeWeight {
                from: self.from.name().to_string(),
                to: self.to.name().to_string(),
                weight: self.weight.to_f64().unwrap_or(f64::NEG_INFINITY),
            });
        }
        Ok(())
    }
}
