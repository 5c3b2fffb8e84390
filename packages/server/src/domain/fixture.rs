//! Fixed demo content for the reserved showcase room.
//!
//! Joining [`DEMO_ROOM_ID`] for the first time seeds the room with a short
//! debugging conversation, three source files and a five-step snapshot
//! timeline of a login handler going from clean to buggy to fixed.

use std::collections::BTreeMap;

use super::{
    entity::{ChatMessage, Room, Snapshot},
    value_object::{FileName, RoomId},
};

/// Room id that is seeded with the demo fixture on first creation.
pub const DEMO_ROOM_ID: &str = "ALPHA-4291";

const AUTH_CONTROLLER: &str = "authController.js";

const AUTH_CONTROLLER_SOURCE: &str = r#"const jwt = require('jsonwebtoken');
const User = require('../models/User');

exports.login = async (req, res) => {
  try {
    const { email, password } = req.body;
    const user = await User.findOne({ email });
    
    if (!user || !(await user.comparePassword(password))) {
      return res.status(401).json({ error: 'Invalid credentials' });
    }
    
    const token = jwt.sign({ userId: user._id }, process.env.JWT_SECRET);
    res.json({ token, user });
  } catch (error) {
    res.status(500).json({ error: 'Server error' });
  }
};"#;

const STYLES_SOURCE: &str = r#"/* Global styles */
body {
  margin: 0;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', sans-serif;
  background: #1a1a1a;
  color: #ffffff;
}"#;

const INDEX_HTML_SOURCE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>CodeCouncil</title>
</head>
<body>
  <div id="root"></div>
</body>
</html>"#;

const TIMELINE: [(&str, &str); 5] = [
    (
        "v1 · Clean",
        r#"const jwt = require('jsonwebtoken');
const User = require('../models/User');

exports.login = async (req, res) => {
  const { email, password } = req.body;
  const user = await User.findOne({ email });
  const token = jwt.sign({ userId: user._id }, process.env.JWT_SECRET);
  res.json({ token });
};"#,
    ),
    (
        "v2 · Bug",
        r#"const jwt = require('jsonwebtoken');
const User = require('../models/User');

exports.login = async (req, res) => {
  const { email, password } = req.body;
  const user = await User.findOne({ email });
  // BUG: No password verification!
  const token = jwt.sign({ userId: user._id }, process.env.JWT_SECRET);
  res.json({ token });
};"#,
    ),
    (
        "v3 · Debug",
        r#"const jwt = require('jsonwebtoken');
const User = require('../models/User');

exports.login = async (req, res) => {
  const { email, password } = req.body;
  console.log('Login attempt:', email); // DEBUG
  const user = await User.findOne({ email });
  console.log('User found:', user); // DEBUG
  const token = jwt.sign({ userId: user._id }, process.env.JWT_SECRET);
  res.json({ token });
};"#,
    ),
    (
        "v4 · Patch",
        r#"const jwt = require('jsonwebtoken');
const User = require('../models/User');

exports.login = async (req, res) => {
  const { email, password } = req.body;
  const user = await User.findOne({ email });
  
  if (!user) {
    return res.status(401).json({ error: 'Invalid credentials' });
  }
  
  const token = jwt.sign({ userId: user._id }, process.env.JWT_SECRET);
  res.json({ token });
};"#,
    ),
    (
        "v5 · Fixed ✓",
        r#"const jwt = require('jsonwebtoken');
const User = require('../models/User');

exports.login = async (req, res) => {
  try {
    const { email, password } = req.body;
    const user = await User.findOne({ email });
    
    if (!user || !(await user.comparePassword(password))) {
      return res.status(401).json({ error: 'Invalid credentials' });
    }
    
    const token = jwt.sign({ userId: user._id }, process.env.JWT_SECRET);
    res.json({ token, user });
  } catch (error) {
    res.status(500).json({ error: 'Server error' });
  }
};"#,
    ),
];

/// Whether `room_id` is the reserved demo room.
pub fn is_demo_room(room_id: &RoomId) -> bool {
    room_id.as_str() == DEMO_ROOM_ID
}

fn message(
    id: u64,
    user_name: &str,
    avatar_color: &str,
    content: &str,
    timestamp: &str,
) -> ChatMessage {
    ChatMessage {
        id,
        user_name: user_name.to_string(),
        avatar_color: avatar_color.to_string(),
        content: content.to_string(),
        timestamp: timestamp.to_string(),
        kind: None,
    }
}

fn file_name(name: &'static str) -> FileName {
    FileName::from_static(name)
}

/// Build the demo room exactly as the fixture defines it.
pub fn demo_room(id: RoomId, created_at: i64) -> Room {
    let messages = vec![
        message(
            1,
            "Arjun",
            "#10B981",
            "Hey checking the new function. Need to optimize the loop",
            "10:42 AM",
        ),
        message(
            2,
            "Priya",
            "#F59E0B",
            "I think line 42 has a typo: const result = processData(input)",
            "10:45 AM",
        ),
        ChatMessage {
            kind: Some("ai".to_string()),
            ..message(
                3,
                "CodeCouncil AI",
                "#8B5CF6",
                "Detected memory leak in fetchUser. Refactor?",
                "Just now",
            )
        },
    ];

    let files = BTreeMap::from([
        (file_name(AUTH_CONTROLLER), AUTH_CONTROLLER_SOURCE.to_string()),
        (file_name("styles.css"), STYLES_SOURCE.to_string()),
        (file_name("index.html"), INDEX_HTML_SOURCE.to_string()),
    ]);

    let snapshots = TIMELINE
        .iter()
        .zip(1u64..)
        .map(|((label, content), id)| Snapshot {
            id,
            label: label.to_string(),
            file_name: file_name(AUTH_CONTROLLER),
            content: content.to_string(),
        })
        .collect();

    Room::with_content(id, created_at, messages, files, snapshots)
}
