/*!
The abstract elements of a diagram.

- [Terms](term) and [statements](statement) are read from text by the [parser](crate::parse).
- [Regions](region) are the cells of a diagram, over which statements are interpreted.
*/

pub mod region;
pub mod statement;
pub mod term;
