//! Pipdice - Library for rolling six-sided dice and rendering them as text
//!
//! This library provides functionality to:
//! - Draw die values from the system entropy source (or an injected one)
//! - Map each value to its pip layout on a 7x7 pixel face
//! - Compose the faces into rows of text and write them out in one go

pub mod cli;
pub mod dice;
pub mod entropy;
pub mod output;
pub mod renderer;
