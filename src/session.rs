//! Cookie based identity.
//!
//! A visitor "is in" a room when they carry its public id in the room cookie.
//! The creator additionally carries the owner secret.

use axum_extra::extract::cookie::{Cookie, CookieJar};

pub const ROOM: &str = "room";
pub const ROOM_MASTER_KEY: &str = "roomMasterKey";

// Names used before rooms were called rooms. Still read, never written.
const LEGACY_ROOM: &str = "session";
const LEGACY_ROOM_MASTER_KEY: &str = "sessionMasterKey";

pub fn room_id(jar: &CookieJar) -> Option<String> {
    value(jar, ROOM, LEGACY_ROOM)
}

pub fn owner_secret(jar: &CookieJar) -> Option<String> {
    value(jar, ROOM_MASTER_KEY, LEGACY_ROOM_MASTER_KEY)
}

pub fn with_room(jar: CookieJar, room_id: &str) -> CookieJar {
    jar.add(site_cookie(ROOM, room_id))
}

pub fn with_owner_secret(jar: CookieJar, secret: &str) -> CookieJar {
    jar.add(site_cookie(ROOM_MASTER_KEY, secret))
}

fn value(jar: &CookieJar, name: &str, legacy: &str) -> Option<String> {
    jar.get(name)
        .or_else(|| jar.get(legacy))
        .map(|cookie| cookie.value().to_owned())
}

fn site_cookie(name: &'static str, value: &str) -> Cookie<'static> {
    Cookie::build((name, value.to_owned())).path("/").build()
}
