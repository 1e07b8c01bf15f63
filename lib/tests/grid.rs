use cellauto_lib::{
    grid::{MOORE, MOORE_CENTER, NEUMANN_CENTER},
    Error, FreeBoundaryGrid, PeriodicBoundaryGrid,
};
use std::error::Error as StdError;

#[test]
fn write_then_read() -> Result<(), Box<dyn StdError>> {
    let mut free = FreeBoundaryGrid::new(4, 3, 0)?;
    let mut periodic = PeriodicBoundaryGrid::new(4, 3, 0)?;
    for y in 0..3 {
        for x in 0..4 {
            assert!(free.set(x, y, 10 * y + x));
            assert!(periodic.set(x, y, 10 * y + x));
        }
    }
    for y in 0..3 {
        for x in 0..4 {
            assert_eq!(*free.get(x, y), 10 * y + x);
            assert_eq!(*periodic.get(x, y), 10 * y + x);
            assert_eq!(free[(x, y)], free[(y * 4 + x) as usize]);
        }
    }
    assert_eq!(free.cells(), periodic.cells());
    Ok(())
}

#[test]
fn periodic_wraps_around() -> Result<(), Box<dyn StdError>> {
    let mut grid = PeriodicBoundaryGrid::new(5, 4, 0)?;
    for (i, cell) in grid.iter_mut().enumerate() {
        *cell = i;
    }
    for y in -9..9 {
        for x in -12..12 {
            let cell = *grid.get(x, y);
            assert_eq!(cell, *grid.get(x + 5, y));
            assert_eq!(cell, *grid.get(x - 5, y));
            assert_eq!(cell, *grid.get(x, y + 4));
            assert_eq!(cell, *grid.get(x, y - 4));
        }
    }
    assert_eq!(*grid.get(-1, -1), 19);
    assert_eq!(*grid.get(5, 0), 0);

    assert!(grid.set(-1, 0, 100));
    assert_eq!(*grid.get(4, 0), 100);
    Ok(())
}

#[test]
fn free_boundary_sentinel() -> Result<(), Box<dyn StdError>> {
    let mut grid = FreeBoundaryGrid::new(3, 3, 7)?;
    grid.fill(1);
    grid.resize(4, 2)?;
    for &(x, y) in &[(-1, 0), (4, 0), (0, -1), (0, 2), (i32::MAX, i32::MIN)] {
        assert_eq!(*grid.get(x, y), 7);
        assert_eq!(grid.index_of(x, y), None);
    }

    assert!(!grid.set(-1, 0, 42));
    assert!(!grid.set(4, 1, 42));
    assert_eq!(grid.get_mut(0, 2), None);
    assert_eq!(*grid.get(-1, 0), 7);
    assert_eq!(*grid.get(100, 100), 7);
    assert!(grid.iter().all(|&cell| cell == 7));
    Ok(())
}

#[test]
fn neighborhoods() -> Result<(), Box<dyn StdError>> {
    let mut free = FreeBoundaryGrid::new(3, 3, -1)?;
    let mut periodic = PeriodicBoundaryGrid::new(3, 3, -1)?;
    for (i, (a, b)) in free.iter_mut().zip(periodic.iter_mut()).enumerate() {
        *a = i as i32;
        *b = i as i32;
    }

    for grid_neumann in [free.neumann(1, 1), periodic.neumann(1, 1)] {
        assert_eq!(grid_neumann.map(|&v| v), [1, 3, 4, 5, 7]);
        assert_eq!(*grid_neumann[NEUMANN_CENTER], 4);
    }
    for grid_moore in [free.moore(1, 1), periodic.moore(1, 1)] {
        assert_eq!(grid_moore.map(|&v| v), [0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    assert_eq!(free.neumann(0, 0).map(|&v| v), [-1, -1, 0, 1, 3]);
    assert_eq!(periodic.neumann(0, 0).map(|&v| v), [6, 2, 0, 1, 3]);
    assert_eq!(
        free.moore(0, 0).map(|&v| v),
        [-1, -1, -1, -1, 0, 1, -1, 3, 4]
    );
    assert_eq!(periodic.moore(0, 0).map(|&v| v), [8, 6, 7, 2, 0, 1, 5, 3, 4]);

    for (i, &(dx, dy)) in MOORE.iter().enumerate() {
        assert_eq!(i as i32, (dy + 1) * 3 + (dx + 1));
        assert!(std::ptr::eq(
            periodic.moore(2, 2)[i],
            periodic.get(2 + dx, 2 + dy)
        ));
    }
    assert!(std::ptr::eq(periodic.moore(2, 1)[MOORE_CENTER], periodic.get(2, 1)));
    Ok(())
}

#[test]
fn resize_is_destructive() -> Result<(), Box<dyn StdError>> {
    let mut grid = PeriodicBoundaryGrid::new(3, 3, 0)?;
    grid.fill(5);
    grid.resize(3, 3)?;
    assert_eq!(grid.len(), 9);
    assert!(grid.iter().all(|&cell| cell == 0));

    grid.fill(5);
    grid.resize(6, 2)?;
    assert_eq!((grid.width(), grid.height(), grid.len()), (6, 2, 12));
    assert!(grid.iter().all(|&cell| cell == 0));
    Ok(())
}

#[test]
fn invalid_dimensions() -> Result<(), Box<dyn StdError>> {
    assert_eq!(
        FreeBoundaryGrid::new(0, 3, 0).err(),
        Some(Error::InvalidDimension {
            width: 0,
            height: 3
        })
    );
    assert_eq!(
        PeriodicBoundaryGrid::new(3, -1, 0).err(),
        Some(Error::InvalidDimension {
            width: 3,
            height: -1
        })
    );

    let mut grid = FreeBoundaryGrid::new(2, 2, 0)?;
    grid.fill(1);
    assert_eq!(
        grid.resize(-2, 2),
        Err(Error::InvalidDimension {
            width: -2,
            height: 2
        })
    );
    assert_eq!((grid.width(), grid.height()), (2, 2));
    assert!(grid.iter().all(|&cell| cell == 1));
    Ok(())
}

#[test]
fn periodic_extreme_coordinates() -> Result<(), Box<dyn StdError>> {
    let mut grid = PeriodicBoundaryGrid::new(3, 1, 0)?;
    for (i, cell) in grid.iter_mut().enumerate() {
        *cell = i;
    }
    // i32::MAX = 3 * 715827882 + 1, i32::MIN = -3 * 715827883 + 1.
    assert_eq!(*grid.get(i32::MAX, 0), 1);
    assert_eq!(*grid.get(i32::MIN, 0), 1);
    assert_eq!(*grid.get(i32::MAX - 3, 0), *grid.get(i32::MAX, 0));
    assert_eq!(*grid.get(i32::MIN + 3, 0), *grid.get(i32::MIN, 0));

    // The neighbor past i32::MAX is (2^31) mod 3 = 2.
    let moore = grid.moore(i32::MAX, 0).map(|&v| v);
    assert_eq!(moore, [0, 1, 2, 0, 1, 2, 0, 1, 2]);
    let neumann = grid.neumann(i32::MAX, 0).map(|&v| v);
    assert_eq!(neumann, [1, 0, 1, 2, 1]);

    // The neighbor before i32::MIN is (-2^31 - 1) mod 3 = 0.
    let moore = grid.moore(i32::MIN, 0).map(|&v| v);
    assert_eq!(moore, [0, 1, 2, 0, 1, 2, 0, 1, 2]);
    for (x, expected) in [(i32::MAX, 2), (i32::MIN, 0)] {
        let east = x.checked_add(1).map_or(expected, |x| *grid.get(x, 0));
        let west = x.checked_sub(1).map_or(expected, |x| *grid.get(x, 0));
        assert_eq!(*grid.moore(x, 0)[5], east);
        assert_eq!(*grid.moore(x, 0)[3], west);
    }

    let free = FreeBoundaryGrid::new(3, 1, 9)?;
    assert_eq!(free.moore(i32::MAX, 0).map(|&v| v), [9; 9]);
    assert_eq!(free.neumann(i32::MIN, i32::MIN).map(|&v| v), [9; 5]);
    Ok(())
}
