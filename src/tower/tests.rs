use super::*;

#[test]
fn test_new_stacks_every_disk_on_source() {
    let store = TowerStore::new(4).unwrap();
    assert_eq!(store.peg(Peg::Source), &[4, 3, 2, 1]);
    assert!(store.is_empty(Peg::Target));
    assert!(store.is_empty(Peg::Temp));
    assert_eq!(store.disk_count(), 4);
    assert!(!store.is_solved());
}

#[test]
fn test_new_rejects_zero_disks() {
    assert_eq!(
        TowerStore::new(0),
        Err(ConfigurationError::DiskCountOutOfRange {
            requested: 0,
            max: MAX_DISKS
        })
    );
}

#[test]
fn test_new_rejects_too_many_disks() {
    assert!(TowerStore::new(MAX_DISKS).is_ok());
    assert_eq!(
        TowerStore::new(MAX_DISKS + 1),
        Err(ConfigurationError::DiskCountOutOfRange {
            requested: MAX_DISKS as i64 + 1,
            max: MAX_DISKS
        })
    );
}

#[test]
fn test_validate_disk_count_rejects_negative_counts() {
    assert!(validate_disk_count(-3, 12).is_err());
    assert!(validate_disk_count(13, 12).is_err());
    assert_eq!(validate_disk_count(12, 12), Ok(12));
    assert_eq!(validate_disk_count(1, 12), Ok(1));
}

#[test]
fn test_top_size_and_height() {
    let store = TowerStore::new(3).unwrap();
    assert_eq!(store.top_size(Peg::Source), TopDisk::Disk(1));
    assert_eq!(store.top_size(Peg::Target), TopDisk::Empty);
    assert_eq!(store.height(Peg::Source), 3);
    assert_eq!(store.height(Peg::Temp), 0);
}

#[test]
fn test_push_and_pop() {
    let mut store = TowerStore::new(3).unwrap();
    let disk = store.pop(Peg::Source).unwrap();
    assert_eq!(disk, 1);
    store.push(Peg::Temp, disk);
    assert_eq!(store.top_size(Peg::Temp), TopDisk::Disk(1));
    assert_eq!(store.top_size(Peg::Source), TopDisk::Disk(2));
}

#[test]
fn test_pop_from_empty_peg_fails() {
    let mut store = TowerStore::new(2).unwrap();
    assert_eq!(
        store.pop(Peg::Target),
        Err(InternalInvariantError::EmptyPeg { peg: Peg::Target })
    );
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "placed on top of")]
fn test_push_larger_disk_on_smaller_panics_in_debug() {
    let mut store = TowerStore::new(3).unwrap();
    store.pop(Peg::Source).unwrap();
    store.push(Peg::Target, 1);
    let disk = store.pop(Peg::Source).unwrap();
    store.push(Peg::Target, disk);
}

#[test]
fn test_relocate_moves_the_top_disk() {
    let mut store = TowerStore::new(3).unwrap();
    assert_eq!(store.relocate(Peg::Source, Peg::Target), Ok(1));
    assert_eq!(store.relocate(Peg::Source, Peg::Temp), Ok(2));
    assert_eq!(store.peg(Peg::Source), &[3]);
    assert_eq!(store.peg(Peg::Target), &[1]);
    assert_eq!(store.peg(Peg::Temp), &[2]);
}

#[test]
fn test_relocate_rejects_illegal_placement_without_mutating() {
    let mut store = TowerStore::new(3).unwrap();
    store.relocate(Peg::Source, Peg::Target).unwrap();
    let before = store.clone();

    assert_eq!(
        store.relocate(Peg::Source, Peg::Target),
        Err(InternalInvariantError::IllegalPlacement {
            disk: 2,
            peg: Peg::Target,
            top: 1
        })
    );
    assert_eq!(store, before);
}

#[test]
fn test_relocate_from_empty_peg_fails() {
    let mut store = TowerStore::new(3).unwrap();
    assert_eq!(
        store.relocate(Peg::Temp, Peg::Target),
        Err(InternalInvariantError::EmptyPeg { peg: Peg::Temp })
    );
}

#[test]
fn test_pegs_snapshot() {
    let mut store = TowerStore::new(2).unwrap();
    store.relocate(Peg::Source, Peg::Temp).unwrap();
    let [source, target, temp] = store.pegs();
    assert_eq!(source, &[2]);
    assert!(target.is_empty());
    assert_eq!(temp, &[1]);
}

#[test]
fn test_is_solved_once_everything_is_on_target() {
    let mut store = TowerStore::new(1).unwrap();
    store.relocate(Peg::Source, Peg::Target).unwrap();
    assert!(store.is_solved());
}
