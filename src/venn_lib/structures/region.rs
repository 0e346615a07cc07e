/*!
Regions of a Venn diagram.

A region is a maximal combination of category memberships, i.e. a single cell of the diagram.

# Representation

With categories sorted by name, each category has a position, and a region is a bitset over positions.
Bit *i* is set exactly when the region lies inside the circle of the *i*th category.
The empty bitset is the area outside every circle, and is not a region.

So, with categories A, B, and C:

| Region | Bits  | Label |
|--------|-------|-------|
| A      | 0b001 | 100   |
| AB     | 0b011 | 110   |
| BC     | 0b110 | 011   |
| ABC    | 0b111 | 111   |

The *label* of a region is the bitstring read left to right by position, which is the convention of the renderer (left to right, then top to bottom, for three circles).
The *id* of a region is the concatenation of the names of its categories.

Membership is always tested through positions, never through names, so categories whose names share letters cannot be confused.

# Order

Regions are ordered by the sequence of their member positions, e.g. A < AB < ABC < AC < B < BC < C.
For single letter category names this is the order of ids.
*/

use std::{cmp::Ordering, collections::BTreeMap};

use crate::{
    config::defaults::{MAX_CATEGORIES, MIN_CATEGORIES},
    misc::log::targets::{self},
    types::err::{self},
};

/// A single cell of a diagram, as a bitset over category positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region(u8);

impl Region {
    /// The region from a bitset, if the bitset is non-empty.
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => None,
            _ => Some(Region(bits)),
        }
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Whether the region lies inside the circle of the category at `position`.
    pub fn contains(&self, position: usize) -> bool {
        position < u8::BITS as usize && self.0 & (1 << position) != 0
    }

    /// Positions of the categories the region lies inside, in ascending order.
    pub fn members(&self) -> impl Iterator<Item = usize> + '_ {
        (0..u8::BITS as usize).filter(|position| self.contains(*position))
    }
}

impl Ord for Region {
    fn cmp(&self, other: &Self) -> Ordering {
        self.members().cmp(other.members())
    }
}

impl PartialOrd for Region {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The regions of a diagram over two or three categories.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionMap {
    categories: Vec<String>,
}

impl RegionMap {
    /// Builds the regions for some categories.
    ///
    /// The categories are sorted, and duplicates removed, before positions are given.
    ///
    /// ```rust
    /// # use venn_lib::structures::region::RegionMap;
    /// let map = RegionMap::new(["B", "A"]).unwrap();
    /// let labels = map.label_map();
    /// assert_eq!(labels.get("A").map(String::as_str), Some("10"));
    /// assert_eq!(labels.get("AB").map(String::as_str), Some("11"));
    /// assert_eq!(labels.len(), 3);
    /// ```
    pub fn new<I, S>(categories: I) -> Result<Self, err::ArityError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut categories = categories
            .into_iter()
            .map(|c| c.as_ref().to_string())
            .collect::<Vec<_>>();
        categories.sort();
        categories.dedup();

        if categories.len() < MIN_CATEGORIES {
            return Err(err::ArityError::TooFew(categories.len()));
        }
        if categories.len() > MAX_CATEGORIES {
            return Err(err::ArityError::TooMany(categories));
        }

        log::debug!(target: targets::REGIONS, "Regions over {categories:?}");
        Ok(RegionMap { categories })
    }

    /// The categories of the diagram, in position order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn position(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == category)
    }

    /// Every region of the diagram, in region order.
    pub fn regions(&self) -> Vec<Region> {
        let mut regions = (1..(1_u8 << self.categories.len()))
            .filter_map(Region::from_bits)
            .collect::<Vec<_>>();
        regions.sort();
        regions
    }

    /// Every region inside the circle of `category`.
    pub fn circle(&self, category: &str) -> Vec<Region> {
        match self.position(category) {
            None => Vec::default(),
            Some(position) => self
                .regions()
                .into_iter()
                .filter(|region| region.contains(position))
                .collect(),
        }
    }

    /// The concatenation of the names of the categories of `region`.
    pub fn id(&self, region: Region) -> String {
        region
            .members()
            .filter_map(|position| self.categories.get(position))
            .map(String::as_str)
            .collect()
    }

    /// The bitstring of the memberships of `region`, read left to right by position.
    pub fn label(&self, region: Region) -> String {
        (0..self.categories.len())
            .map(|position| match region.contains(position) {
                true => '1',
                false => '0',
            })
            .collect()
    }

    /// A map from the id to the label of each region.
    pub fn label_map(&self) -> BTreeMap<String, String> {
        self.regions()
            .into_iter()
            .map(|region| (self.id(region), self.label(region)))
            .collect()
    }

    /// The count of regions, one less than two to the count of categories.
    pub fn len(&self) -> usize {
        (1 << self.categories.len()) - 1
    }

    /// Never true of a map from [new](RegionMap::new), which requires at least two categories.
    /// Kept as the companion of [len](RegionMap::len).
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
