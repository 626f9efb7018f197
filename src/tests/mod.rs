mod header;
mod message_proptest;
mod security;
