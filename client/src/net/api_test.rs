use super::*;

#[test]
fn part_file_name_keeps_picked_name() {
    assert_eq!(part_file_name("photo.png"), "photo.png");
}

#[test]
fn part_file_name_falls_back_when_blank() {
    assert_eq!(part_file_name("  "), "upload");
}

