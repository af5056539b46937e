use murmur::domain::{StoragePath, UploadId, sanitize_filename};

#[test]
fn given_upload_id_and_filename_when_creating_path_then_format_is_uuid_underscore_filename() {
    let id = UploadId::new();
    let path = StoragePath::for_upload(&id, "clip.wav");

    assert_eq!(path.as_str(), format!("{}_clip.wav", id.as_uuid()));
}

#[test]
fn given_two_uploads_with_same_name_when_creating_paths_then_paths_differ() {
    let path_a = StoragePath::for_upload(&UploadId::new(), "clip.wav");
    let path_b = StoragePath::for_upload(&UploadId::new(), "clip.wav");

    assert_ne!(path_a, path_b);
}

#[test]
fn given_filename_with_directories_when_sanitizing_then_keeps_last_component() {
    assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
    assert_eq!(sanitize_filename("C:\\Users\\me\\clip.wav"), "clip.wav");
}

#[test]
fn given_degenerate_filename_when_sanitizing_then_falls_back_to_upload() {
    assert_eq!(sanitize_filename(""), "upload");
    assert_eq!(sanitize_filename(".."), "upload");
    assert_eq!(sanitize_filename("dir/"), "upload");
}

#[test]
fn given_storage_path_when_displayed_then_matches_as_str() {
    let path = StoragePath::for_upload(&UploadId::new(), "test.txt");

    assert_eq!(format!("{}", path), path.as_str());
}
