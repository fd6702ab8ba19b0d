//! # Clause-interaction graphs of CNF formulas.
//!
//! Render a Boolean formula in conjunctive normal form as an undirected
//! [DOT](https://graphviz.org/doc/info/lang.html) graph:
//!
//! * every clause is drawn as a cluster of its literals,
//! * every literal is connected to every literal of every other clause,
//!   unless the two literals are complementary (`x` and `x'`).
//!
//! The formula is given as JSON: a list of clauses, each clause a list of
//! `[name, polarity]` pairs.
//!
//! ```rust
//! use cnfdot::cnf::Cnf;
//! use cnfdot::options::RenderOptions;
//!
//! let options = RenderOptions::builder()
//!     .include_cluster_id_in_label(true)
//!     .build();
//! let cnf = Cnf::from_json(r#"[[["x", true], ["y", false]], [["x", false]]]"#, &options).unwrap();
//!
//! let dot = cnf.to_dot();
//! assert!(dot.contains("n0_1 -- n1_0;"));
//! assert!(!dot.contains("n0_0 -- n1_0;"));
//! ```
//!
//! The layout itself is left to graphviz, e.g. `fdp -Tpng cnf.dot > cnf.png`.

pub mod clause;
pub mod cnf;
pub mod dot_writer;
pub mod edges;
pub mod error;
pub mod input;
pub mod literal;
pub mod namer;
pub mod options;
