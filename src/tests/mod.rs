// Test modules for Parley
// Each module mirrors the source module it covers

mod chat_tests;
