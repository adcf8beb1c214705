mod document_messages_tests;
