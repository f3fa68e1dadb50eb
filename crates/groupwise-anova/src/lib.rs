//! One-way analysis of variance (ANOVA) across independent groups.
//!
//! Given two or more groups of observations, the one-way ANOVA decomposes the
//! total variation into a between-group and a within-group component and
//! tests whether the group means differ more than chance would allow. The
//! per-group statistics come from `groupwise-stats`; this crate adds the
//! sum-of-squares decomposition, the F-statistic, the p-value, and the
//! partial eta-squared effect size.
//!
//! The procedure assumes the groups are independent and drawn from
//! populations with equal variance. Neither assumption is validated here.
//!
//! # Modules
//!
//! - [`distribution`]: The F-distribution CDF collaborator and its default
//!   `statrs`-backed provider
//! - [`one_way`]: The one-way ANOVA procedure and its result type
//!
//! # Examples
//!
//! ```
//! use groupwise_anova::one_way::one_way_anova;
//!
//! let groups: &[&[f64]] = &[
//!     &[35.0, 30.0, 28.0, 31.0, 26.0],
//!     &[27.0, 33.0, 25.0, 26.0, 29.0],
//!     &[24.0, 29.0, 22.0, 25.0, 20.0],
//! ];
//! let result = one_way_anova(groups).unwrap();
//! assert_eq!(result.df_between, 2);
//! assert_eq!(result.df_within, 12);
//! assert!(result.p_value < 0.05);
//! ```

pub mod distribution;
pub mod one_way;
