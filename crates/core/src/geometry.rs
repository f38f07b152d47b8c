//! Screen-space primitives shared by the controller and the render layer.
//!
//! Cells are addressed the way terminals address them: column `x`, row `y`,
//! both starting at zero in the top-left corner.

/// A single cell position, usually the target of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
	pub x: u16,
	pub y: u16,
}

impl Point {
	#[must_use]
	pub const fn new(x: u16, y: u16) -> Self {
		Self { x, y }
	}
}

/// An axis-aligned rectangle of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
	pub x: u16,
	pub y: u16,
	pub width: u16,
	pub height: u16,
}

impl Region {
	#[must_use]
	pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.width == 0 || self.height == 0
	}

	#[must_use]
	pub fn contains(&self, point: Point) -> bool {
		if self.is_empty() {
			return false;
		}
		let inside_x = point.x >= self.x && point.x < self.x.saturating_add(self.width);
		let inside_y = point.y >= self.y && point.y < self.y.saturating_add(self.height);
		inside_x && inside_y
	}

	/// Smallest region covering both `self` and `other`. Empty regions are
	/// ignored.
	#[must_use]
	pub fn union(&self, other: Region) -> Region {
		if other.is_empty() {
			return *self;
		}
		if self.is_empty() {
			return other;
		}
		let left = self.x.min(other.x);
		let top = self.y.min(other.y);
		let right = self
			.x
			.saturating_add(self.width)
			.max(other.x.saturating_add(other.width));
		let bottom = self
			.y
			.saturating_add(self.height)
			.max(other.y.saturating_add(other.height));
		Region::new(left, top, right - left, bottom - top)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn contains_is_half_open() {
		let region = Region::new(2, 3, 4, 2);
		assert!(region.contains(Point::new(2, 3)));
		assert!(region.contains(Point::new(5, 4)));
		assert!(!region.contains(Point::new(6, 4)));
		assert!(!region.contains(Point::new(5, 5)));
		assert!(!region.contains(Point::new(1, 3)));
	}

	#[test]
	fn empty_region_contains_nothing() {
		assert!(!Region::new(0, 0, 0, 10).contains(Point::new(0, 0)));
	}

	#[test]
	fn union_spans_both_regions() {
		let root = Region::new(1, 1, 10, 3);
		let dropdown = Region::new(1, 4, 6, 5);
		assert_eq!(root.union(dropdown), Region::new(1, 1, 10, 8));
		assert_eq!(root.union(Region::default()), root);
	}
}
