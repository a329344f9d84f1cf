// Chat Tests Module - Testing the chat state core
// - contact_tests: Contact and ContactDirectory filtering
// - conversation_tests: ConversationLog newest-first append
// - composer_tests: Composer buffer, picker and submit
// - id_tests: IdGenerator strategies
// - message_tests: Message accessors and identities
// - settings_tests: Settings load/save and derived values

mod conversation_tests;
mod id_tests;
