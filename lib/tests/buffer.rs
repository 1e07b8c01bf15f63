use cellauto_lib::{PeriodicBoundaryGrid, RotatingBuffer};
use std::{error::Error, ptr};

#[test]
fn relative_addressing() {
    let mut buffer = RotatingBuffer::<usize, 3>::from_fn(|i| i * 10);
    for _ in 0..7 {
        let before = [
            buffer.get::<0>() as *const usize,
            buffer.get::<1>() as *const usize,
            buffer.get::<2>() as *const usize,
        ];
        let values = (*buffer.get::<1>(), *buffer.get::<2>());
        buffer.timestep();
        assert!(ptr::eq(before[1], buffer.get::<0>()));
        assert!(ptr::eq(before[2], buffer.get::<1>()));
        assert!(ptr::eq(before[0], buffer.get::<2>()));
        assert_eq!((*buffer.get::<0>(), *buffer.get::<1>()), values);
    }
    assert_eq!(buffer.current_index(), 7 % 3);
    assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![10, 20, 0]);
}

#[test]
fn timestep_keeps_contents() {
    let mut buffer = RotatingBuffer::<Vec<u8>, 2>::new(Vec::new());
    buffer.get_mut::<1>().push(1);
    buffer.timestep();
    assert_eq!(buffer.get::<0>(), &vec![1]);
    assert!(buffer.get::<1>().is_empty());

    buffer.timestep();
    assert!(buffer.get::<0>().is_empty());
    assert_eq!(buffer.get::<1>(), &vec![1]);
}

#[test]
fn read_one_write_other() -> Result<(), Box<dyn Error>> {
    let mut buffer = RotatingBuffer::<_, 2>::try_new(|| PeriodicBoundaryGrid::new(3, 2, 0_u8))?;
    buffer.get_mut::<0>().fill(4);
    for _ in 0..3 {
        let (current, next) = buffer.get_pair_mut::<0, 1>();
        for (index, cell) in next.iter_mut().enumerate() {
            *cell = current[index] + 1;
        }
        buffer.timestep();
    }
    assert!(buffer.get::<0>().iter().all(|&cell| cell == 7));
    assert!(buffer.get::<1>().iter().all(|&cell| cell == 6));

    for grid in buffer.slots_mut() {
        grid.resize(5, 5)?;
    }
    assert!(buffer.iter().all(|grid| grid.len() == 25));
    Ok(())
}

#[test]
fn construction_error() {
    let buffer = RotatingBuffer::<_, 2>::try_new(|| PeriodicBoundaryGrid::new(0, 2, 0_u8));
    assert!(buffer.is_err());

    let buffer = RotatingBuffer::<u8, 4>::new(3);
    assert_eq!(buffer.len(), 4);
    assert!(!buffer.is_empty());
    assert!(buffer.iter().all(|&slot| slot == 3));
}
